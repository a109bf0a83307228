//! Default public Monero nodes
//!
//! Restricted-RPC mainnet nodes that answer `get_info`, `get_block_count` and
//! `get_block` without authentication.

use crate::config::EndpointConfig;

/// Get the built-in node list
pub fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig::new("https://node.sethforprivacy.com:443").with_note("TLS"),
        EndpointConfig::new("http://nodes.hashvault.pro:18081"),
        EndpointConfig::new("http://node.c3pool.com:18081"),
        EndpointConfig::new("http://node.community.rino.io:18081"),
        EndpointConfig::new("http://node.moneroworld.com:18089").with_note("Round-robin pool"),
        EndpointConfig::new("http://xmr-node.cakewallet.com:18081"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_endpoints() {
        let endpoints = default_endpoints();
        assert_eq!(endpoints.len(), 6);
        assert!(endpoints.iter().all(|e| e.enabled));

        let unique: HashSet<_> = endpoints.iter().map(|e| &e.url).collect();
        assert_eq!(unique.len(), endpoints.len());
    }
}
