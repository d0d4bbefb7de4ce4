//! Conformance diagnostics rendered with ariadne.
//!
//! The candidate descriptor is pretty-printed as a declaration (see
//! [`pretty_decl`](crate::pretty_decl)) and the report points at the member
//! that broke the contract, or at the declaration header when the member is
//! missing altogether.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use conformal_core::{ConformanceError, Failure, FailureKind};
use conformal_types::{Ty, TyBuilder};
use std::io::Write;
use std::ops::Range;

use crate::pretty::{DeclSource, MemberKind, pretty_decl};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Name shown for the rendered declaration.
    /// Defaults to "<candidate>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render a conformance error to stderr using default config.
///
/// # Example
/// ```no_run
/// use conformal::{Checker, render_error};
/// use conformal::types::{BoxBuilder, DeclBuilder, ty};
///
/// let b = BoxBuilder::new();
/// let counter = DeclBuilder::record(&b, "Counter")
///     .assoc("Item", ty!(b, Int))
///     .build();
/// if let Err(e) = Checker::new(&b).bind_iterator(&counter) {
///     render_error(&e, &counter);
/// }
/// ```
pub fn render_error<B: TyBuilder>(error: &ConformanceError, candidate: &Ty<B>) {
    render_error_to(error, candidate, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render a conformance error to a writer with the given configuration.
///
/// `candidate` is the descriptor the error was produced for.
pub fn render_error_to<B: TyBuilder>(
    error: &ConformanceError,
    candidate: &Ty<B>,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<candidate>");
    let source = pretty_decl(candidate);
    let failure = error.failure();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let primary = member_span(&source, failure);
    let mut report = Report::build(ReportKind::Error, (filename, primary.clone().unwrap_or(source.header.clone())))
        .with_message(error.to_string())
        .with_code(failure.kind.code())
        .with_config(ariadne_config);

    match primary {
        Some(span) => {
            report = report
                .with_label(
                    Label::new((filename, span))
                        .with_message(label_message(failure))
                        .with_color(colors.next()),
                )
                .with_label(
                    Label::new((filename, source.header.clone()))
                        .with_message(format!("checked against {}", error.contract()))
                        .with_color(colors.next()),
                );
        }
        None => {
            report = report.with_label(
                Label::new((filename, source.header.clone()))
                    .with_message(label_message(failure))
                    .with_color(colors.next()),
            );
        }
    }

    if !failure.signature.is_empty() {
        report = report.with_help(format!("expected `{}`", failure.signature));
    }
    let mut cause = failure.cause.as_deref();
    while let Some(inner) = cause {
        report = report.with_note(format!("caused by: {}", inner.kind.name()));
        cause = inner.cause.as_deref();
    }

    report
        .finish()
        .write((filename, Source::from(source.text.as_str())), &mut *writer)
}

/// Span of the member `failure` is about, if the declaration has one.
fn member_span(source: &DeclSource, failure: &Failure) -> Option<Range<usize>> {
    let kind = match failure.kind {
        FailureKind::MissingField | FailureKind::WrongFieldType => MemberKind::Field,
        FailureKind::MissingAssociatedType => MemberKind::AssocType,
        FailureKind::MissingMethod
        | FailureKind::WrongArity
        | FailureKind::WrongParamType
        | FailureKind::WrongReturnType => MemberKind::Method,
        FailureKind::WrongKind => return None,
    };
    source
        .member(kind, &failure.member)
        .map(|member| member.span.clone())
}

fn label_message(failure: &Failure) -> String {
    let member = &failure.member;
    match (failure.kind, &failure.found) {
        (FailureKind::WrongKind, _) => "not a record, union or enum".to_string(),
        (FailureKind::MissingMethod, Some(found)) => format!("`{member}` is `{found}`, not a method"),
        (kind, _) if kind.is_missing() => format!("`{member}` is not declared"),
        (FailureKind::WrongParamType, Some(found)) => format!(
            "parameter {} is `{found}`",
            failure.position.unwrap_or_default()
        ),
        (_, Some(found)) => format!("found `{found}`"),
        (kind, None) => kind.name().to_string(),
    }
}
