// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in product lists used when no vocabulary file overrides them.

use super::vocabulary::VocabularyKind;

pub(crate) fn words(kind: VocabularyKind) -> &'static [&'static str] {
    match kind {
        VocabularyKind::Lathers => LATHERS,
        VocabularyKind::Brushes => BRUSHES,
        VocabularyKind::Razors => RAZORS,
        VocabularyKind::Blades => BLADES,
        VocabularyKind::PostShaves => POSTSHAVES,
        VocabularyKind::Fragrances => FRAGRANCES,
        VocabularyKind::Preps => PREPS,
    }
}

const LATHERS: &[&str] = &[
    "Ariana & Evans - Peach & Pineapple",
    "Arko - Shaving Soap Stick",
    "Barrister and Mann - Seville",
    "Barrister and Mann - Le Grand Chypre",
    "Cella - Crema Sapone",
    "Declaration Grooming - Sellout",
    "Declaration Grooming - Darkfall",
    "Haslinger - Schafmilch",
    "House of Mammoth - Tonka",
    "Mitchell's Wool Fat",
    "Noble Otter - Barrbarr",
    "Proraso - Green",
    "Proraso - White",
    "Stirling Soap Co. - Executive Man",
    "Stirling Soap Co. - Bay Rum",
    "Tabac",
    "Tallow + Steel - Yuzu/Rose/Patchouli",
    "Taylor of Old Bond Street - Sandalwood",
    "Wholly Kaw - Fougère Royale",
    "Zingari Man - The Watchman",
];

const BRUSHES: &[&str] = &[
    "AP Shave Co - G5C Synthetic",
    "Declaration Grooming - B2 Badger",
    "Dogwood Handcrafts - Synthetic",
    "Maggard Razors - 24mm Synthetic",
    "Omega - 10049 Boar",
    "Omega - Hi-Brush Synthetic",
    "Semogue - 620 Boar",
    "Semogue - Owners Club Boar",
    "Simpson - Chubby 2 Best Badger",
    "Simpson - Trafalgar T3 Synthetic",
    "Stirling Soap Co. - Kong Synthetic",
    "Yaqi - Mew Synthetic",
    "Zenith - 507 Boar",
];

const RAZORS: &[&str] = &[
    "Blackland - Blackbird",
    "Blackland - Vector",
    "Gillette - Fatboy",
    "Gillette - Slim Adjustable",
    "Gillette - Super Speed",
    "Karve - Christopher Bradley",
    "Merkur - 34C",
    "Muhle - R41",
    "Parker - 24C",
    "Rockwell - 6S",
    "Razorock - Game Changer",
    "Timeless - .95 Open Comb",
    "Wolfman - WR1",
    "Yaqi - Mellon",
];

const BLADES: &[&str] = &[
    "Astra Superior Platinum",
    "Feather Hi-Stainless",
    "Gillette Nacet",
    "Gillette Platinum",
    "Gillette Silver Blue",
    "Gillette 7 O'Clock Yellow",
    "Personna Lab Blue",
    "Personna Platinum",
    "Polsilver Super Iridium",
    "Shark Super Chrome",
    "Voskhod",
];

const POSTSHAVES: &[&str] = &[
    "Alum Block",
    "Barrister and Mann - Seville Aftershave Splash",
    "Bay Rum Aftershave",
    "Clubman Pinaud - Lilac Vegetal",
    "Declaration Grooming - Sellout Aftershave",
    "Nivea - Sensitive Post Shave Balm",
    "Proraso - Green Aftershave Lotion",
    "Stirling Soap Co. - Executive Man Aftershave Splash",
    "Thayers - Witch Hazel",
    "Witch Hazel",
];

const FRAGRANCES: &[&str] = &[
    "Barrister and Mann - Seville EdP",
    "Chanel - Bleu de Chanel",
    "Creed - Aventus",
    "Dior - Sauvage",
    "Guerlain - Vetiver",
    "Terre d'Hermès",
    "Tom Ford - Tobacco Vanille",
];

const PREPS: &[&str] = &[
    "Cold Water Rinse",
    "Hot Towel",
    "Proraso - Pre-Shave Cream",
    "Shower",
    "Stirling Soap Co. - Pre-Shave Soap",
    "The Art of Shaving - Pre-Shave Oil",
];
