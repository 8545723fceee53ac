//! Name nodes.
//!
//! The front end keeps names structured; rendering them to text is the
//! extraction pass's job.

/// A declaration name.
///
/// Examples:
/// - `Node` - `Identifier("Node")`
/// - `~Node` - `Destructor("Node")`
/// - `operator+` - `Operator("+")`
/// - `operator bool` - `Conversion("bool")`
/// - `SharedPtr<Node>` - `TemplateId { name: "SharedPtr", args: ["Node"] }`
/// - `Atomic::Node` - `Qualified { base: Atomic, name: Node }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name<'ast> {
    /// Plain identifier.
    Identifier(&'ast str),
    /// Destructor name; holds the class name without the tilde.
    Destructor(&'ast str),
    /// Operator function name; holds the operator spelling.
    Operator(&'ast str),
    /// Conversion operator; holds the target type spelling.
    Conversion(&'ast str),
    /// Template name with argument spellings.
    TemplateId {
        name: &'ast str,
        args: &'ast [&'ast str],
    },
    /// Scope-qualified name.
    Qualified {
        base: &'ast Name<'ast>,
        name: &'ast Name<'ast>,
    },
    /// Anonymous namespace, class or argument.
    Anonymous,
}

impl<'ast> Name<'ast> {
    /// Get the innermost (unqualified) name.
    pub fn unqualified(&self) -> &Name<'ast> {
        match self {
            Name::Qualified { name, .. } => name.unqualified(),
            _ => self,
        }
    }

    /// Get the identifier text for plain identifiers.
    pub fn identifier(&self) -> Option<&'ast str> {
        match self {
            Name::Identifier(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_destructor(&self) -> bool {
        matches!(self.unqualified(), Name::Destructor(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.unqualified(), Name::Operator(_) | Name::Conversion(_))
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, Name::Qualified { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Name::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unqualified_strips_scopes() {
        let atomic = Name::Identifier("Atomic");
        let scene = Name::Identifier("Scene");
        let node = Name::Identifier("Node");
        let inner = Name::Qualified {
            base: &scene,
            name: &node,
        };
        let outer = Name::Qualified {
            base: &atomic,
            name: &inner,
        };

        assert!(outer.is_qualified());
        assert_eq!(outer.unqualified(), &node);
        assert_eq!(outer.unqualified().identifier(), Some("Node"));
    }

    #[test]
    fn name_predicates() {
        assert!(Name::Destructor("Node").is_destructor());
        assert!(Name::Operator("+").is_operator());
        assert!(Name::Conversion("bool").is_operator());
        assert!(!Name::Identifier("operatorCount").is_operator());
        assert!(Name::Anonymous.is_anonymous());
        assert_eq!(Name::Destructor("Node").identifier(), None);
    }
}
