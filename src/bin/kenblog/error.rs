pub(crate) use anyhow::bail;
pub(crate) use kenblog::Result;
