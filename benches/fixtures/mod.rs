// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::time::Duration;

use criterion::Criterion;
use sotd::model::{VocabularyKind, VocabularySet};

const MAKERS: [&str; 12] = [
    "Barrister and Mann",
    "Declaration Grooming",
    "Stirling Soap Co.",
    "Noble Otter",
    "House of Mammoth",
    "Wholly Kaw",
    "Ariana & Evans",
    "Zingari Man",
    "Tallow + Steel",
    "Chiseled Face",
    "Southern Witchcrafts",
    "Catie's Bubbles",
];

const SCENTS: [&str; 10] = [
    "Seville",
    "Bay Rum",
    "Sandalwood",
    "Lavender",
    "Fougère Royale",
    "Leather & Tobacco",
    "Oud",
    "Yuzu/Rose/Patchouli",
    "Vetiver",
    "Peach & Pineapple",
];

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Builtin,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Lather-like product names; `Medium` and `Large` repeat maker/scent pairs with a batch suffix.
pub fn haystack(case: Case) -> Vec<String> {
    let batches = match case {
        Case::Builtin => return VocabularySet::builtin().get(VocabularyKind::Lathers).to_vec(),
        Case::Medium => 5,
        Case::Large => 50,
    };

    let mut out = Vec::with_capacity(MAKERS.len() * SCENTS.len() * batches);
    for batch in 0..batches {
        for maker in MAKERS {
            for scent in SCENTS {
                out.push(format!("{maker} - {scent} (batch {batch:03})"));
            }
        }
    }
    out
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<usize>().ok()).unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}
