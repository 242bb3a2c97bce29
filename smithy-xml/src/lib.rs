/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! XML decoding for the awsQuery protocol.

pub mod decode;
pub mod error;
mod unescape;
