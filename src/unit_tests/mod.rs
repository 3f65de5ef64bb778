// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod directed_tests;
#[cfg(feature = "proptest1")]
mod proptest_helpers;
