//! Tests for webserver services
