pub mod branch_name;
pub mod revision;

/// Longest accepted branch name; 40 characters is reserved for literal commit ids
pub const MAX_BRANCH_NAME_LENGTH: usize = 39;

// '=' separates names from ids in the reference file
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|=|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
