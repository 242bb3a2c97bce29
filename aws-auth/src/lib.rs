/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Credential loading for AWS requests.

pub mod middleware;
pub mod provider;

use aws_types::credentials::SharedCredentialsProvider;
use smithy_http::property_bag::PropertyBag;

/// Make `provider` available to [`CredentialsStage`](middleware::CredentialsStage)
pub fn set_provider(bag: &mut PropertyBag, provider: SharedCredentialsProvider) {
    bag.insert(provider);
}
