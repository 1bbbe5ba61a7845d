#![allow(dead_code)]

pub mod review_service_mock;
