// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod collection_service;
pub mod extraction_service;
pub mod feed_service;
pub mod title_normalizer;
