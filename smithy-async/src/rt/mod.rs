/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Async runtime agnostic traits and their Tokio implementations.

pub mod executor;
pub mod sleep;
