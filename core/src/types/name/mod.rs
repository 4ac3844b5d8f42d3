use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 256;

/// Unique icon identifier, usually a kebab-case token such as `arrow-up`.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IconName(String);
