//! Localization seam.
//!
//! Translation of literal template strings is an external concern. The
//! pipeline hands the chosen template and its already-resolved positional
//! arguments to a [`Localizer`] exactly once per rendered sentence; the
//! returned string keeps `{token}` placeholders unresolved so the host can
//! merge them with the rendered parameter map in its own substitution step.

/// Maps a template string plus positional arguments to localized text.
///
/// Implementations substitute `%1$s`-style positional markers with the given
/// arguments and must leave named `{token}` placeholders untouched.
pub trait Localizer: Send + Sync {
    /// Translate `text`, substituting positional arguments.
    fn translate(&self, text: &str, args: &[String]) -> String;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn translate(&self, text: &str, args: &[String]) -> String {
        (**self).translate(text, args)
    }
}

/// Pass-through localizer: returns the template as-is apart from positional
/// substitution. Useful for tests and for hosts without translation catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoLocalizer;

impl Localizer for EchoLocalizer {
    fn translate(&self, text: &str, args: &[String]) -> String {
        let mut out = text.to_owned();
        for (i, arg) in args.iter().enumerate() {
            out = out.replace(&format!("%{}$s", i + 1), arg);
        }
        out
    }
}
