//! Message payloads and template arguments.

use std::error::Error;
use std::fmt::{self, Display};

/// Kind reported for errors whose concrete type has been erased.
pub const UNKNOWN_ERROR_KIND: &str = "Error";

/// The message half of a log call.
///
/// The caller picks the variant, either explicitly through the constructors
/// or implicitly through the `From` conversions for string types. How the
/// entry is rendered depends on the variant:
///
/// - `Text` is written verbatim.
/// - `Error` is written with the error's kind name as message and the error
///   itself attached.
/// - `Object` is written using its `Display` form.
///
/// [`Message::error`] needs the concrete error type to name the kind.
/// `Box<dyn Error>` does not implement `Error`, so boxed or otherwise erased
/// errors go through [`Message::error_dyn`] or [`Message::error_with_kind`].
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Literal message text.
    Text(&'a str),
    /// An error value logged on its own.
    Error {
        error: &'a (dyn Error + 'static),
        /// Short type name of the error, e.g. `CustomError`.
        kind: &'static str,
    },
    /// Any other displayable value.
    Object(&'a dyn Display),
}

impl<'a> Message<'a> {
    pub fn text(text: &'a str) -> Self {
        Message::Text(text)
    }

    /// Wrap an error, capturing its type name as the kind.
    pub fn error<E: Error + 'static>(error: &'a E) -> Self {
        Message::Error {
            error,
            kind: short_type_name::<E>(),
        }
    }

    /// Wrap a type-erased error, such as the contents of a `Box<dyn Error>`.
    ///
    /// The concrete type is no longer known, so the kind is
    /// [`UNKNOWN_ERROR_KIND`]. Use [`Message::error_with_kind`] to name it.
    pub fn error_dyn(error: &'a (dyn Error + 'static)) -> Self {
        Message::Error {
            error,
            kind: UNKNOWN_ERROR_KIND,
        }
    }

    /// Wrap an already type-erased error under an explicit kind name.
    pub fn error_with_kind(error: &'a (dyn Error + 'static), kind: &'static str) -> Self {
        Message::Error { error, kind }
    }

    pub fn object(value: &'a dyn Display) -> Self {
        Message::Object(value)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(text)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(text.as_str())
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Error { error, kind } => f
                .debug_struct("Error")
                .field("kind", kind)
                .field("error", &error.to_string())
                .finish(),
            Message::Object(value) => f.debug_tuple("Object").field(&value.to_string()).finish(),
        }
    }
}

/// Substitution values for a template write, in placeholder order.
///
/// Recorded by backends through `Debug`, which lists each value's `Display`
/// form. Nothing is interpolated into the template.
#[derive(Clone, Copy)]
pub struct FormatArgs<'a>(&'a [&'a dyn Display]);

impl<'a> FormatArgs<'a> {
    pub fn new(args: &'a [&'a dyn Display]) -> Self {
        Self(args)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Display> + 'a {
        self.0.iter().copied()
    }
}

impl fmt::Debug for FormatArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for arg in self.0 {
            list.entry(&format_args!("{}", arg));
        }
        list.finish()
    }
}

/// Type name of `T` without its module path.
///
/// Generic parameters are kept as written, so `Wrapper<io::Error>` comes out
/// as `Wrapper<std::io::error::Error>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CustomError;

    impl Display for CustomError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "something custom went wrong")
        }
    }

    impl Error for CustomError {}

    #[derive(Debug)]
    struct Wrapper<T>(T);

    #[test]
    fn test_short_type_name_strips_path() {
        assert_eq!(short_type_name::<CustomError>(), "CustomError");
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
    }

    #[test]
    fn test_short_type_name_keeps_generics() {
        let name = short_type_name::<Wrapper<u32>>();
        assert_eq!(name, "Wrapper<u32>");
    }

    #[test]
    fn test_short_type_name_primitive() {
        assert_eq!(short_type_name::<u64>(), "u64");
    }

    #[test]
    fn test_error_constructor_captures_kind() {
        let err = CustomError;
        match Message::error(&err) {
            Message::Error { kind, error } => {
                assert_eq!(kind, "CustomError");
                assert_eq!(error.to_string(), "something custom went wrong");
            }
            other => panic!("expected error payload, got {:?}", other),
        }
    }

    #[test]
    fn test_boxed_error_uses_fallback_kind() {
        let boxed: Box<dyn Error> = Box::new(CustomError);
        match Message::error_dyn(boxed.as_ref()) {
            Message::Error { kind, error } => {
                assert_eq!(kind, UNKNOWN_ERROR_KIND);
                assert_eq!(error.to_string(), "something custom went wrong");
            }
            other => panic!("expected error payload, got {:?}", other),
        }
    }

    #[test]
    fn test_string_conversions_are_text() {
        let owned = String::from("owned");
        assert!(matches!(Message::from("hello"), Message::Text("hello")));
        assert!(matches!(Message::from(&owned), Message::Text("owned")));
    }

    #[test]
    fn test_format_args_debug_lists_display_forms() {
        let args: [&dyn Display; 3] = [&"alice", &42, &1.5];
        let args = FormatArgs::new(&args);
        assert_eq!(args.len(), 3);
        assert_eq!(format!("{:?}", args), "[alice, 42, 1.5]");
    }

    #[test]
    fn test_format_args_empty() {
        let args = FormatArgs::new(&[]);
        assert!(args.is_empty());
        assert_eq!(format!("{:?}", args), "[]");
    }
}
