pub mod game;
pub mod model;
pub mod policy;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "nagare"
    }

    pub const fn tagline() -> &'static str {
        "Match the field or let it flow"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "nagare");
        assert!(!AppInfo::tagline().is_empty());
        assert!(!AppInfo::version().is_empty());
    }
}
