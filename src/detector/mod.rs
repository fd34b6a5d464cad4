//! QR code detection modules
//!
//! Only the alignment pattern stage lives here; finder pattern detection and
//! sampling are left to the caller's pipeline.

/// Alignment pattern detection for QR versions 2+
pub mod alignment;
