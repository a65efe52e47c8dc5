use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;

use crate::client::{
    components::Navbar,
    routes::{Build, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/?:..query")]
    Home { query: ShareQuery },

    #[route("/build/:hash")]
    Build { hash: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Roster page without a shared build
    pub fn home() -> Self {
        Self::Home {
            query: ShareQuery::default(),
        }
    }
}

/// Query of the roster page; `?build=<hash>` is a shared build link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareQuery {
    pub build: Option<String>,
}

impl FromQuery for ShareQuery {
    fn from_query(query: &str) -> Self {
        let build = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "build")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self { build }
    }
}

impl fmt::Display for ShareQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.build {
            Some(hash) => write!(f, "build={}", hash),
            None => Ok(()),
        }
    }
}
