mod codec;

pub use codec::FileCodec;
