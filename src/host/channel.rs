use crate::{
    bridge::{facade::MapFacade, protocol::MapCall},
    traits::MapBackend,
};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Why an interop call did not complete
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteropError {
    /// The host side of the channel is gone
    #[error("interop channel disconnected")]
    Disconnected,
    #[error("interop call canceled")]
    Canceled,
    #[error("interop call failed: {0}")]
    Failed(String),
}

/// Host-side object the bridge calls back into by method name
#[async_trait(?Send)]
pub trait HostHelper {
    async fn invoke_method(&self, method: &str) -> Result<(), InteropError>;
}

/// Call/callback channel between the host component and the bridge
#[async_trait(?Send)]
pub trait InteropChannel {
    /// Sends a `createMap` call. Once the map is built, `helper` is invoked
    /// with the call's completion method.
    async fn create_map(&self, helper: Rc<dyn HostHelper>, call: MapCall)
        -> Result<(), InteropError>;

    async fn invoke(&self, call: MapCall) -> Result<(), InteropError>;
}

/// Logs the outcome of an interop call. Returns whether it succeeded.
pub(crate) fn absorb(method: &str, result: Result<(), InteropError>) -> bool {
    match result {
        Ok(()) => true,
        Err(InteropError::Disconnected) => {
            log::trace!("{}: channel disconnected, nothing to do", method);
            false
        }
        Err(InteropError::Canceled) => {
            log::warn!("{} was canceled", method);
            false
        }
        Err(InteropError::Failed(reason)) => {
            log::error!("{} failed: {}", method, reason);
            false
        }
    }
}

/// Sends `call` and absorbs any failure
pub async fn safe_invoke<C>(channel: &C, call: MapCall) -> bool
where
    C: InteropChannel + ?Sized,
{
    let method = call.method_name();
    absorb(method, channel.invoke(call).await)
}

/// In-process channel that executes calls directly on a [`MapFacade`]
pub struct LocalChannel<B: MapBackend> {
    facade: Rc<RefCell<MapFacade<B>>>,
    connected: Cell<bool>,
}

impl<B: MapBackend> LocalChannel<B> {
    pub fn new(facade: MapFacade<B>) -> Self {
        Self::shared(Rc::new(RefCell::new(facade)))
    }

    pub fn shared(facade: Rc<RefCell<MapFacade<B>>>) -> Self {
        Self {
            facade,
            connected: Cell::new(true),
        }
    }

    pub fn facade(&self) -> Rc<RefCell<MapFacade<B>>> {
        Rc::clone(&self.facade)
    }

    /// Every later call fails with [`InteropError::Disconnected`]
    pub fn disconnect(&self) {
        self.connected.set(false);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    fn execute(&self, call: MapCall) -> Result<(), InteropError> {
        if !self.connected.get() {
            return Err(InteropError::Disconnected);
        }
        let mut facade = self
            .facade
            .try_borrow_mut()
            .map_err(|_| InteropError::Failed("facade is busy".to_string()))?;
        facade
            .dispatch(call)
            .map_err(|e| InteropError::Failed(e.to_string()))
    }
}

#[async_trait(?Send)]
impl<B: MapBackend> InteropChannel for LocalChannel<B> {
    async fn create_map(
        &self,
        helper: Rc<dyn HostHelper>,
        call: MapCall,
    ) -> Result<(), InteropError> {
        let MapCall::CreateMap {
            completion_method, ..
        } = &call
        else {
            return Err(InteropError::Failed(format!(
                "expected createMap, got {}",
                call.method_name()
            )));
        };
        let completion_method = completion_method.clone();

        self.execute(call)?;
        // The facade is released before the host runs its callback
        helper.invoke_method(&completion_method).await
    }

    async fn invoke(&self, call: MapCall) -> Result<(), InteropError> {
        self.execute(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::handle::MapHandle, engine::NativeBackend};

    struct Failing(InteropError);

    #[async_trait(?Send)]
    impl InteropChannel for Failing {
        async fn create_map(
            &self,
            _helper: Rc<dyn HostHelper>,
            _call: MapCall,
        ) -> Result<(), InteropError> {
            Err(self.0.clone())
        }

        async fn invoke(&self, _call: MapCall) -> Result<(), InteropError> {
            Err(self.0.clone())
        }
    }

    fn invalidate() -> MapCall {
        MapCall::InvalidateSize {
            container: MapHandle::new("map-1"),
        }
    }

    #[tokio::test]
    async fn test_safe_invoke_absorbs_every_failure() {
        for error in [
            InteropError::Disconnected,
            InteropError::Canceled,
            InteropError::Failed("boom".into()),
        ] {
            assert!(!safe_invoke(&Failing(error), invalidate()).await);
        }
    }

    #[tokio::test]
    async fn test_local_channel_disconnect() {
        let channel = LocalChannel::new(MapFacade::new(NativeBackend::new()));
        assert!(channel.invoke(invalidate()).await.is_ok());

        channel.disconnect();
        assert!(!channel.is_connected());
        assert_eq!(
            channel.invoke(invalidate()).await,
            Err(InteropError::Disconnected)
        );
    }

    #[tokio::test]
    async fn test_create_map_requires_create_call() {
        struct Never;

        #[async_trait(?Send)]
        impl HostHelper for Never {
            async fn invoke_method(&self, _method: &str) -> Result<(), InteropError> {
                panic!("helper must not be called");
            }
        }

        let channel = LocalChannel::new(MapFacade::new(NativeBackend::new()));
        let result = channel.create_map(Rc::new(Never), invalidate()).await;
        assert!(matches!(result, Err(InteropError::Failed(_))));
    }
}
