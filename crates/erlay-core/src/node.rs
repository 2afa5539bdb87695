//! Adapter traits that let any renderer's node and edge types be laid out.
//!
//! The layout engine never owns concrete node types. A renderer implements
//! [`HasId`] and [`HasGeometry`] for its boxes and [`HasEndpoints`] for its
//! relationships, and the engine writes the computed [`Position`] back
//! through [`HasGeometry::set_position`].
//!
//! [`Node`] and [`Edge`] are ready-made implementations for callers that do
//! not have their own types.

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Size};

/// A value with a stable, unique identifier.
pub trait HasId {
    /// Returns the identifier edges use to refer to this value
    fn id(&self) -> &str;
}

/// A rectangular box with a fixed size and a movable top-left corner.
pub trait HasGeometry {
    /// Returns the fixed size of the box
    fn size(&self) -> Size;

    /// Returns the current top-left corner
    fn position(&self) -> Position;

    /// Moves the box so its top-left corner is at `position`
    fn set_position(&mut self, position: Position);
}

/// A directed reference from one node to another.
///
/// The direction reads "source references target", as a foreign key
/// references the table it points at.
pub trait HasEndpoints {
    /// Returns the identifier of the referencing node
    fn source(&self) -> &str;

    /// Returns the identifier of the referenced node
    fn target(&self) -> &str;
}

impl<T: HasId + ?Sized> HasId for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: HasEndpoints + ?Sized> HasEndpoints for &T {
    fn source(&self) -> &str {
        (**self).source()
    }

    fn target(&self) -> &str {
        (**self).target()
    }
}

impl<S: AsRef<str>> HasEndpoints for (S, S) {
    fn source(&self) -> &str {
        self.0.as_ref()
    }

    fn target(&self) -> &str {
        self.1.as_ref()
    }
}

/// A plain rectangular node.
///
/// # Examples
///
/// ```
/// use erlay_core::{
///     geometry::{Position, Size},
///     node::{HasGeometry, HasId, Node},
/// };
///
/// let mut users = Node::new("users", Size::new(200, 120));
/// assert_eq!(users.id(), "users");
/// assert_eq!(users.position(), Position::default());
///
/// users.set_position(Position::new(50, 80));
/// assert_eq!(users.position().y(), 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    size: Size,
    #[serde(default)]
    position: Position,
}

impl Node {
    /// Creates a node at the origin
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            position: Position::default(),
        }
    }

    /// Sets the initial position (builder style)
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl HasId for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasGeometry for Node {
    fn size(&self) -> Size {
        self.size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// A plain directed edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl HasEndpoints for Edge {
    fn source(&self) -> &str {
        &self.source
    }

    fn target(&self) -> &str {
        &self.target
    }
}
