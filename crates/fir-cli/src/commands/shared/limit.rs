/// Page size for list and search commands: `--limit` on the subcommand wins
/// over the global `--limit`, which wins over `general.default_limit`.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn subcommand_limit_wins() {
        assert_eq!(effective_limit(Some(5), Some(50), 20), 5);
    }

    #[test]
    fn global_then_config_default() {
        assert_eq!(effective_limit(None, Some(50), 20), 50);
        assert_eq!(effective_limit(None, None, 20), 20);
    }
}
