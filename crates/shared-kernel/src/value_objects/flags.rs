use bitflags::bitflags;

bitflags! {
    /// Flags controlling how a directory is listed.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ListOptions: u32 {
        /// Skip the counting pass and grow the result while enumerating.
        const DONT_COUNT = 1 << 0;
        /// An absent pattern matches every name without calling the matcher.
        const NULL_PATTERN_MATCHES = 1 << 1;
    }
}

bitflags! {
    /// Flags controlling directory creation.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct CreateOptions: u32 {
        /// Create every missing ancestor before the final directory.
        const RECURSIVE = 1 << 2;
        /// Fail when the final directory already exists.
        const ERROR_IF_EXISTS = 1 << 3;
    }
}

impl ListOptions {
    #[must_use]
    pub fn pre_counted(self) -> bool {
        !self.contains(Self::DONT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listing_is_pre_counted() {
        assert!(ListOptions::default().pre_counted());
        assert!(!ListOptions::DONT_COUNT.pre_counted());
    }

    #[test]
    fn create_flags_combine() {
        let both = CreateOptions::RECURSIVE | CreateOptions::ERROR_IF_EXISTS;
        assert!(both.contains(CreateOptions::RECURSIVE));
        assert_eq!(both - CreateOptions::ERROR_IF_EXISTS, CreateOptions::RECURSIVE);
    }
}
