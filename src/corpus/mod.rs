pub mod fingerprint;
pub mod snapshot;

pub use fingerprint::CorpusFingerprint;
pub use snapshot::ReviewCorpus;
