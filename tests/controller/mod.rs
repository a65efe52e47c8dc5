//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state built over a temporary data directory, verifying
//! status codes, response bodies and what ends up in the data files.

mod build;
mod class;
mod raider;

use raidcomp_test_utils::prelude::*;

use crate::util::{body_json, body_text, TestSetupExt};
