// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Retry logic with exponential backoff for the Amaltech site services, with
//! separate policies for reads (queries) and writes (mutations).

mod retry;

pub use retry::{retry, RetryConfig, RetryableError};
