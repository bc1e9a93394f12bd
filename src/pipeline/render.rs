//! Rendering: the two deterministic output transforms.
//!
//! ## Why filter at all?
//!
//! Conversion engines export everything they see — navigation tables, image
//! embeds, code fences, block quotes. Callers feeding the result into plain
//! text channels (chat messages, search indexes, TTS) want only the prose
//! skeleton. `simple` mode strips the export down to headings, lists, and
//! marker-free paragraph lines; `complete` mode keeps the export verbatim
//! and wraps it in a metadata envelope instead.
//!
//! Both transforms are single-pass, stateless, and total over their input —
//! an empty string yields an empty (or near-empty) result, never an error.
//! `complete` output embeds a processing timestamp, so it is the one
//! intentional exception to byte-for-byte idempotence.
//!
//! ## Line retention rule (`simple`)
//!
//! A line survives iff its trimmed form is non-empty and either
//! 1. starts with `#`, `-`, `*`, or `1.` (headings and list markers are
//!    kept unconditionally), or
//! 2. contains none of `|`, `![`, ` ``` `, `>` anywhere.
//!
//! Rule 2 is blunt on purpose: a paragraph with a `>` in the middle is
//! dropped even though it is not a block quote. Callers that need those
//! lines should request `complete` mode instead.

use crate::config::MarkdownMode;
use crate::output::ConversionMetadata;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

/// Substrings that disqualify a non-marker line in `simple` mode.
const DROP_MARKERS: [&str; 4] = ["|", "![", "```", ">"];

/// Render the engine's raw markdown according to `mode`.
///
/// `context` is only consulted in [`MarkdownMode::Complete`]; `simple`
/// output depends on `raw` alone.
pub fn render(raw: &str, mode: MarkdownMode, context: &ConversionMetadata) -> String {
    match mode {
        MarkdownMode::Simple => render_simple(raw),
        MarkdownMode::Complete => render_complete(raw, context),
    }
}

// ── Simple mode ──────────────────────────────────────────────────────────

static RE_BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// True when a line survives the `simple` filter.
fn keep_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    if stripped.starts_with('#')
        || stripped.starts_with('-')
        || stripped.starts_with('*')
        || stripped.starts_with("1.")
    {
        return true;
    }
    !DROP_MARKERS.iter().any(|m| stripped.contains(m))
}

/// Content-only rendition: filtered lines, blank runs collapsed, trimmed.
fn render_simple(raw: &str) -> String {
    let kept: Vec<&str> = raw.lines().filter(|line| keep_line(line)).collect();
    let joined = kept.join("\n");
    let collapsed = RE_BLANK_RUN.replace_all(&joined, "\n\n");
    collapsed.trim().to_string()
}

// ── Complete mode ────────────────────────────────────────────────────────

/// Metadata envelope: header block, horizontal rule, verbatim content,
/// footer. No line of `raw` is altered or dropped.
fn render_complete(raw: &str, ctx: &ConversionMetadata) -> String {
    let mut out = String::with_capacity(raw.len() + 512);

    out.push_str("---\n");
    out.push_str("# Converted Document\n");
    out.push('\n');
    out.push_str("**Document metadata:**\n");
    out.push_str(&format!("- **Source URL:** {}\n", ctx.source_url));
    out.push_str(&format!(
        "- **Converted:** {}\n",
        ctx.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(ref ct) = ctx.fetch.content_type {
        out.push_str(&format!("- **Content type:** {}\n", ct));
    }
    if let Some(ref lm) = ctx.fetch.last_modified {
        out.push_str(&format!("- **Last modified:** {}\n", lm));
    }
    if let Some(ref server) = ctx.fetch.server {
        out.push_str(&format!("- **Server:** {}\n", server));
    }
    out.push_str(&format!("- **HTTP status:** {}\n", ctx.fetch.status_code));
    out.push('\n');
    out.push_str("---\n");
    out.push('\n');
    out.push_str("## Content\n");
    out.push('\n');
    out.push_str(raw);
    out.push('\n');
    out.push_str("\n---\n");
    out.push('\n');
    out.push_str(&format!("*Processed at: {}*\n", Utc::now().to_rfc3339()));

    out
}

// ── Tests ────────────────────────────────────────────────────────────────
