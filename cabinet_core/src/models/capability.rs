//! Capabilities the DTO projections are generic over.

use uuid::Uuid;

/// Anything carrying a stable identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Identifiable values that also expose a display name and a description.
pub trait Nameable: Identifiable {
    fn name(&self) -> String;

    fn description(&self) -> String;
}
