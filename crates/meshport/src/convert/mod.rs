pub mod invoker;

pub use invoker::ConverterInvoker;
