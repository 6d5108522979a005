// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client for the external chart-rendering HTTP service.

pub mod client;

pub use client::{RenderClient, RenderError, DEFAULT_VIS_REQUEST_SERVER, VIS_REQUEST_SERVER_ENV};
