// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sotd: a keyboard-driven wizard for composing shave-of-the-day posts.
//!
//! Products are picked per category from fuzzy-searchable vocabularies and assembled into a
//! markdown document.

pub mod config;
pub mod document;
pub mod export;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod tui;
pub mod wizard;
