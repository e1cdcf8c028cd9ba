//! Integration tests for the tweetext CLI and library

mod config_test;
mod extract_test;
