//! Catalog loading against a live local HTTP server.

mod http_tests;
