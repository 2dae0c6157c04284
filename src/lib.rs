// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pitchdeck: keyboard- and click-driven slide decks in the terminal.
//!
//! A [`deck::Deck`] is a static table of slides linked by `next`/`previous` ids. A
//! [`presentation::Presentation`] mounts one slide at a time and routes input through the
//! [`nav`] layer, where staged reveals consume forward input before the deck moves on.

pub mod deck;
pub mod logging;
pub mod model;
pub mod nav;
pub mod presentation;
pub mod tui;
