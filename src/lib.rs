//! Workspace-level integration tests for seqgen-rs live in `tests/`.
