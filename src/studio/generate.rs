// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Observable state of the single generation slot.
///
/// `Idle → Pending → {Succeeded, Cancelled, Failed}`. A terminal state stays
/// observable until the next request starts; any non-`Pending` state accepts
/// a new request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Cancelled,
    Failed(String),
}

impl GenerationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
