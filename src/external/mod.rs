// ABOUTME: Concrete clients for the external safety source and geolocation service
// ABOUTME: HTTP implementations of the provider traits the engines consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! External service clients
//!
//! The engines only know the [`crate::allergen::AllergenSource`] and
//! [`crate::i18n::detection::GeoipProvider`] traits; these modules provide
//! the HTTP-backed implementations used in production, each with a bounded
//! timeout and a fail-soft error surface.

/// IP geolocation client
pub mod geoip_client;
/// Safety/allergen knowledge source client
pub mod safety_client;

pub use geoip_client::{GeoipClientConfig, IpApiClient, StaticGeoipProvider};
pub use safety_client::{SafetyClient, SafetyClientConfig};
