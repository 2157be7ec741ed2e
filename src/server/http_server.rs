use may::coroutine::JoinHandle;
use may_minihttp::{HttpService, HttpServiceFactory};
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Wrapper around may_minihttp's HTTP server.
///
/// Each accepted connection gets its own service instance that knows the
/// socket peer address.
pub struct HttpServer<T>(pub T);

/// A service that can be specialised for one connection.
pub trait PeerAware: HttpService + Clone + Send + Sync + 'static {
    /// Copy of the service bound to the connection from `peer`.
    fn with_peer(&self, peer: Option<SocketAddr>) -> Self;
}

/// Per-connection factory; may_minihttp passes the accepted socket's fd as `id`.
struct ConnectionFactory<T>(T);

impl<T: PeerAware> HttpServiceFactory for ConnectionFactory<T> {
    type Service = T;

    fn new_service(&self, id: usize) -> T {
        self.0.with_peer(peer_of_connection(id))
    }
}

#[cfg(unix)]
fn peer_of_connection(id: usize) -> Option<SocketAddr> {
    use std::mem::ManuallyDrop;
    use std::os::unix::io::{FromRawFd, RawFd};

    let fd = RawFd::try_from(id).ok()?;
    // SAFETY: the fd belongs to the stream just accepted by may_minihttp and
    // stays open for this call; ManuallyDrop keeps it from being closed here.
    let stream = ManuallyDrop::new(unsafe { TcpStream::from_raw_fd(fd) });
    stream.peer_addr().ok()
}

#[cfg(not(unix))]
fn peer_of_connection(_id: usize) -> Option<SocketAddr> {
    None
}

/// Handle to a running HTTP server
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Poll the listen address until it accepts a connection (about 250ms budget).
    pub fn wait_ready(&self) -> io::Result<()> {
        for _ in 0..50 {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(io::Error::new(io::ErrorKind::TimedOut, "server not ready"))
    }

    /// Cancel the accept coroutine and wait for it to finish.
    pub fn stop(self) {
        // SAFETY: cancel() is unsafe in may; the handle is owned here and the
        // coroutine is not touched after it is joined below.
        unsafe {
            self.handle.coroutine().cancel();
        }
        if self.handle.join().is_err() {
            warn!(addr = %self.addr, "Server coroutine ended with a panic");
        }
    }

    /// Block until the server coroutine finishes.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

impl<T: PeerAware> HttpServer<T> {
    /// Bind `addr` and start serving.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let handle = ConnectionFactory(self.0).start(addr)?;
        Ok(ServerHandle { addr, handle })
    }
}
