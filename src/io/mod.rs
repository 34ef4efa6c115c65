//! RDF/XML serialization in the nested, abbreviated form registries exchange.

pub(crate) mod reader;
pub(crate) mod writer;
