use std::future::Future;
use tracing::{error, info};
use crate::catalog::console::ConsoleExit;
use crate::core::library::LibraryResult;

/// Drives the HTTP server and the console against the same catalog.
///
/// Choosing "6" in the console ends both. A closed console input only ends
/// the console; the server is then awaited until it stops on its own.
pub async fn run_drivers<S, C>(server: S, console: C) -> LibraryResult<()>
    where S: Future<Output=LibraryResult<()>>,
          C: Future<Output=LibraryResult<ConsoleExit>> {
    tokio::pin!(server);
    let exit = tokio::select! {
        res = &mut server => {
            if let Err(err) = &res {
                error!(error = %err, "API server stopped");
            }
            return res;
        }
        res = console => res?,
    };
    match exit {
        ConsoleExit::Quit => Ok(()),
        ConsoleExit::InputClosed => {
            info!("console closed, API server keeps serving");
            server.await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use crate::catalog::console::ConsoleExit;
    use crate::catalog::drivers::run_drivers;
    use crate::core::library::{LibraryError, LibraryResult};

    #[tokio::test]
    async fn test_should_stop_server_when_user_quits() {
        let server = std::future::pending::<LibraryResult<()>>();
        let res = run_drivers(server, async { Ok(ConsoleExit::Quit) }).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_should_keep_serving_after_input_closed() {
        let served = Arc::new(AtomicBool::new(false));
        let flag = served.clone();
        let server = async move {
            // yields once so the console finishes first
            tokio::task::yield_now().await;
            flag.store(true, Ordering::SeqCst);
            Err(LibraryError::runtime("server stopped"))
        };
        let res = run_drivers(server, async { Ok(ConsoleExit::InputClosed) }).await;
        assert!(served.load(Ordering::SeqCst));
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }

    #[tokio::test]
    async fn test_should_propagate_console_failure() {
        let server = std::future::pending::<LibraryResult<()>>();
        let res = run_drivers(server, async { Err(LibraryError::runtime("stdout closed")) }).await;
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }

    #[tokio::test]
    async fn test_should_return_server_failure_while_console_runs() {
        let server = async { Err(LibraryError::runtime("accept failed")) };
        let console = std::future::pending::<LibraryResult<ConsoleExit>>();
        let res = run_drivers(server, console).await;
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }
}
