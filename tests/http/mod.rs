//! reqwest adapter tests against a local mock server

pub mod mock_server;
