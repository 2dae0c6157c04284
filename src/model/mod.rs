// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A deck is made of slides; each slide carries its static neighbour links and, optionally, a
//! staged reveal.

pub mod ids;
pub mod slide;

pub use ids::{SlideId, SlideIdError};
pub use slide::{
    AdvanceSynonym, LinkKind, RevealSpec, RevealSpecError, RevealStage, RevealStart, SlideContent,
    SlideNode,
};
