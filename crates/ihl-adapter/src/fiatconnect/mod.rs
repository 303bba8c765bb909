/*
[INPUT]:  Provider registry URL, FiatConnect account details
[OUTPUT]: FiatConnect provider list
[POS]:    FiatConnect layer - provider discovery and account linking
[UPDATE]: When FiatConnect integration grows beyond discovery
*/

pub mod client;

pub use client::FiatConnectClient;
