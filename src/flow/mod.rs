//! Pure sign-in flow state machines, kept free of browser and framework types
//! so they compile and test on any target. Routes own the rendering and wire
//! these types to signals; everything with a temporal or ordering rule lives
//! here.

pub(crate) mod countdown;
pub(crate) mod credentials;
pub(crate) mod otp;
pub(crate) mod verify;
