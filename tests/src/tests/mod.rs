mod allowlist_minting;
