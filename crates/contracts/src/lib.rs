//! Wire types shared between the contract review front end and the services it talks to.

pub mod usecases;
