use bitflags::bitflags;

bitflags! {
    /// Which of the four constraint forces participate in the total.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ConstraintFlags: u8 {
        const AXIAL   = 1 << 0;
        const CREASE  = 1 << 1;
        const FACE    = 1 << 2;
        const DAMPING = 1 << 3;

        const ALL = Self::AXIAL.bits()
            | Self::CREASE.bits()
            | Self::FACE.bits()
            | Self::DAMPING.bits();
    }
}

impl serde::Serialize for ConstraintFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ConstraintFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Default for ConstraintFlags {
    fn default() -> Self {
        ConstraintFlags::ALL
    }
}

/// All runtime tunables of the solver, read afresh every step.
///
/// There is no hidden global state: the solver owns one of these and the
/// embedding UI replaces or mutates it through the solver's accessors.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Axial stiffness EA; the per-edge spring constant is EA / rest length.
    /// Changing this changes the stable time step.
    pub axial_stiffness: f32,
    /// Hinge stiffness factor for mountain/valley creases (scaled by crease
    /// rest length).
    pub fold_stiffness: f32,
    /// Hinge stiffness factor for facet creases.
    pub facet_stiffness: f32,
    /// In-plane angular stiffness of each triangle.
    pub face_stiffness: f32,
    /// Fraction of critical damping applied along each edge.
    pub damping_ratio: f32,
    /// Linear interpolation between flat (0) and the full fold target (1).
    pub fold_percent: f32,
    pub enabled: ConstraintFlags,
}

impl SimulationParameters {
    pub const fn new() -> Self {
        Self {
            axial_stiffness: 20.0,
            fold_stiffness: 0.7,
            facet_stiffness: 0.7,
            face_stiffness: 0.2,
            damping_ratio: 0.45,
            fold_percent: 0.0,
            enabled: ConstraintFlags::ALL,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new()
    }
}
