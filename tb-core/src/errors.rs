pub use anyhow::{anyhow, bail, ensure};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// This macro creates an enum which derives from thiserror::Error, and also creates constructor
// functions in snake case for each of the enum variants.  An optional visibility in front of the
// enum name applies to both the enum and the constructors.
#[macro_export]
macro_rules! err_impl {
    (@hidden $vis:vis $errtype:ident, $item:ident, String) => {
        paste! {
            $vis fn [<$item:snake>](in_: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.into())}
            }
        }
    };

    (@hidden $vis:vis $errtype:ident, $item:ident, $($dtype:tt)::+) => {
        paste! {
            $vis fn [<$item:snake>](in_: &$($dtype)::+) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.clone())}
            }
        }
    };

    ($vis:vis $errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:tt)::+),)+
    ) => {
        #[derive(Debug, Error)]
        $vis enum $errtype {
            $(#[$errinfo] $item($($dtype)::+)),+
        }

        impl $errtype {
            $(err_impl! {@hidden $vis $errtype, $item, $($dtype)::+})+
        }
    };
}

pub use err_impl;

// The only error kind the lifecycle logic produces itself; everything else comes from the
// stores.  The server turns this into a 404.
err_impl! {pub NotFoundError,
    #[error("no test container with read id {0}")]
    ContainerByReadId(String),

    #[error("no test container with write id {0}")]
    ContainerByWriteId(String),

    #[error("no test case with id {0}")]
    TestCase(String),

    #[error("test container {0} has no test cases")]
    EmptyContainer(String),

    #[error("no client with id {0}")]
    Client(String),
}

pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<NotFoundError>().is_some()
}
