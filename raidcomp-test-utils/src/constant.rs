pub const CLASSES_FILE_NAME: &str = "classes.json";
pub const RAIDERS_FILE_NAME: &str = "raiders.json";
pub const BUILDS_FILE_NAME: &str = "builds.json";
