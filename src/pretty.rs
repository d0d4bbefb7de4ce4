//! Declaration pretty-printing with member spans.
//!
//! Conformance failures are about members of a declaration, but descriptors
//! have no source text. This module renders one, remembering where each
//! member landed, so diagnostics have something to point at:
//!
//! ```text
//! record Counter {
//!     count: Usize
//!     type Item = Int
//!     fn next(&mut Self) -> Option[Int]
//! }
//! ```

use std::fmt::Write;
use std::ops::Range;

use conformal_types::{DeclShape, MethodSignature, Scalar, Ty, TyBuilder, TyKind};

/// Which member list a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    AssocType,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpan {
    pub kind: MemberKind,
    pub name: String,
    pub span: Range<usize>,
}

/// Rendered text of a descriptor plus the spans of its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclSource {
    pub text: String,
    /// `record Name` for declarations; the whole text otherwise.
    pub header: Range<usize>,
    pub members: Vec<MemberSpan>,
}

impl DeclSource {
    pub fn member(&self, kind: MemberKind, name: &str) -> Option<&MemberSpan> {
        self.members
            .iter()
            .find(|member| member.kind == kind && member.name == name)
    }
}

/// Renders `ty` as a declaration. Non-declarations render as their type.
pub fn pretty_decl<B: TyBuilder>(ty: &Ty<B>) -> DeclSource {
    let TyKind::Decl {
        shape,
        name,
        fields,
        methods,
        assoc,
    } = ty.kind()
    else {
        let text = ty.to_string();
        let header = 0..text.len();
        return DeclSource {
            text,
            header,
            members: Vec::new(),
        };
    };

    let mut text = String::new();
    let mut members = Vec::new();
    let _ = write!(text, "{} {}", shape.keyword(), name.as_str());
    let header = 0..text.len();
    text.push_str(" {\n");

    let mut push = |text: &mut String, kind, member: &str, line: String| {
        text.push_str("    ");
        let start = text.len();
        text.push_str(&line);
        members.push(MemberSpan {
            kind,
            name: member.to_string(),
            span: start..text.len(),
        });
        text.push('\n');
    };

    for (ident, field) in fields.iter() {
        let line = match (shape, field.kind()) {
            (DeclShape::Enum, TyKind::Scalar(Scalar::Unit)) => ident.as_str().to_string(),
            _ => format!("{}: {field}", ident.as_str()),
        };
        push(&mut text, MemberKind::Field, ident.as_str(), line);
    }
    for (ident, bound) in assoc.iter() {
        let line = format!("type {} = {bound}", ident.as_str());
        push(&mut text, MemberKind::AssocType, ident.as_str(), line);
    }
    for (ident, signature) in methods.iter() {
        let line = MethodSignature::new(ident.as_str(), signature).to_string();
        push(&mut text, MemberKind::Method, ident.as_str(), line);
    }
    text.push('}');

    DeclSource {
        text,
        header,
        members,
    }
}
