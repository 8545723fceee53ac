//! Name rendering.

use jsbind_ast::Name;

/// Renders structured names to the text the binding model stores.
pub struct NameResolver;

impl NameResolver {
    /// Render a name, including any scope qualifiers.
    ///
    /// Anonymous names render as the empty string.
    pub fn resolve(name: &Name<'_>) -> String {
        let mut out = String::new();
        Self::write(name, &mut out);
        out
    }

    /// Render an optional name; an absent name renders as the empty string.
    pub fn resolve_opt(name: Option<&Name<'_>>) -> String {
        name.map(Self::resolve).unwrap_or_default()
    }

    /// Render only the innermost segment of a name.
    ///
    /// Registry lookups are keyed on unqualified names.
    pub fn resolve_unqualified(name: &Name<'_>) -> String {
        Self::resolve(name.unqualified())
    }

    fn write(name: &Name<'_>, out: &mut String) {
        match name {
            Name::Identifier(id) => out.push_str(id),
            Name::Destructor(class) => {
                out.push('~');
                out.push_str(class);
            }
            Name::Operator(op) | Name::Conversion(op) => {
                out.push_str("operator ");
                out.push_str(op);
            }
            Name::TemplateId { name, args } => {
                out.push_str(name);
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(arg);
                }
                out.push('>');
            }
            Name::Qualified { base, name } => {
                Self::write(base, out);
                out.push_str("::");
                Self::write(name, out);
            }
            Name::Anonymous => {}
        }
    }
}
