//! Shared primitive types used across both view cores.

/// One invocation of the periodic synthetic-update callback.
pub type Tick = u64;

/// Stable identifier of a hospital record. Assigned at seeding, never
/// reused or reassigned.
pub type HospitalId = u32;
