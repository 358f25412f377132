/// A record a field refers to: an entity or a user account.
///
/// The engine only reads records. Hosts implement this for their own entity
/// handles; everything beyond identity and label is optional.
pub trait Record {
    /// The record identifier, as displayed.
    fn id(&self) -> String;

    /// The record label, if it has one.
    fn label(&self) -> Option<String>;

    /// Returns true for the anonymous (unauthenticated) principal.
    ///
    /// Anonymous records have no URL, and placeholders they cannot resolve
    /// are replaced with fixed values before substitution.
    fn is_anonymous(&self) -> bool {
        false
    }

    /// A field value addressed by placeholder path (`title`,
    /// `author:display-name`, ...).
    ///
    /// Only consulted by [`FieldTokens`](crate::FieldTokens).
    fn field(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn id(&self) -> String {
        (**self).id()
    }

    fn label(&self) -> Option<String> {
        (**self).label()
    }

    fn is_anonymous(&self) -> bool {
        (**self).is_anonymous()
    }

    fn field(&self, path: &str) -> Option<String> {
        (**self).field(path)
    }
}
