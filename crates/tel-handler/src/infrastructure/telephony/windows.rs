//! Windows telephony via TAPI 3.
//!
//! TAPI 3 is a COM API.  The provider object (`ITTAPI`) enumerates the
//! *addresses* (lines) of every installed telephony service provider; an
//! address creates calls (`ITBasicCallControl`) which are then connected.
//!
//! COM is initialised for the calling thread by [`ComGuard`] when the
//! provider is initialised and torn down again when the provider is dropped.

#![cfg(target_os = "windows")]

use tracing::{debug, warn};
use windows::core::BSTR;
use windows::Win32::Devices::Tapi::{ITAddress, ITBasicCallControl, ITTAPI, TAPI};
use windows::Win32::Foundation::{RPC_E_CHANGED_MODE, S_OK, VARIANT_FALSE};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER,
    COINIT_APARTMENTTHREADED,
};

use crate::application::telephony::{
    AddressType, MediaType, TelephonyCall, TelephonyError, TelephonyLine, TelephonyProvider,
};

/// `LINEADDRESSTYPE_PHONENUMBER` from `tapi3if.h`.
const LINEADDRESSTYPE_PHONENUMBER: i32 = 0x0000_0001;
/// `TAPIMEDIATYPE_AUDIO` from `tapi3if.h`.
const TAPIMEDIATYPE_AUDIO: i32 = 0x0000_0008;

fn platform_error(context: &str, e: windows::core::Error) -> TelephonyError {
    TelephonyError::Platform(format!("{context}: {e}"))
}

// ── COM apartment ─────────────────────────────────────────────────────────────

/// RAII wrapper that calls `CoUninitialize` on `Drop` when appropriate.
///
/// The `PhantomData<*const ()>` field keeps the guard `!Send`, so it cannot
/// leave the thread whose apartment it owns.
#[must_use = "ComGuard must be kept alive for the duration of COM usage"]
struct ComGuard {
    should_uninit: bool,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComGuard {
    fn init() -> Result<Self, TelephonyError> {
        // SAFETY: called once per thread; balanced by `Drop`.
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if hr.is_ok() {
            return Ok(Self {
                should_uninit: true,
                _not_send: std::marker::PhantomData,
            });
        }
        if hr == RPC_E_CHANGED_MODE {
            // Thread already has an MTA; COM is usable but not ours to tear down.
            warn!("CoInitializeEx: RPC_E_CHANGED_MODE, reusing existing apartment");
            return Ok(Self {
                should_uninit: false,
                _not_send: std::marker::PhantomData,
            });
        }
        Err(TelephonyError::Platform(format!(
            "CoInitializeEx failed: HRESULT 0x{:08X}",
            hr.0 as u32
        )))
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.should_uninit {
            // SAFETY: balances the successful CoInitializeEx in `init`.
            unsafe { CoUninitialize() };
        }
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

/// TAPI 3 implementation of [`TelephonyProvider`].
///
/// Field order matters: `tapi` is released before `_com` uninitialises COM.
#[derive(Default)]
pub struct TapiProvider {
    tapi: Option<ITTAPI>,
    _com: Option<ComGuard>,
}

impl TapiProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TelephonyProvider for TapiProvider {
    type Line = TapiLine;

    fn initialize(&mut self) -> Result<(), TelephonyError> {
        let com = ComGuard::init()?;

        // SAFETY: COM is initialised on this thread by `com`.
        let tapi: ITTAPI = unsafe { CoCreateInstance(&TAPI, None, CLSCTX_INPROC_SERVER) }
            .map_err(|e| platform_error("could not create TAPI object", e))?;
        // SAFETY: `tapi` is a valid interface pointer.
        unsafe { tapi.Initialize() }.map_err(|e| platform_error("ITTAPI::Initialize failed", e))?;

        debug!("TAPI initialised");
        self.tapi = Some(tapi);
        self._com = Some(com);
        Ok(())
    }

    fn lines(&self) -> Result<Vec<TapiLine>, TelephonyError> {
        let tapi = self.tapi.as_ref().ok_or(TelephonyError::NotInitialized)?;

        // SAFETY: `tapi` was initialised in `initialize`.
        let addresses = unsafe { tapi.EnumerateAddresses() }
            .map_err(|e| platform_error("ITTAPI::EnumerateAddresses failed", e))?;

        let mut lines = Vec::new();
        loop {
            let mut slot: Option<ITAddress> = None;
            let mut fetched = 0u32;
            // SAFETY: `slot` has room for exactly one element, as requested.
            let hr = unsafe { addresses.Next(1, &mut slot, &mut fetched) };
            if hr != S_OK || fetched == 0 {
                break;
            }
            let Some(address) = slot else { break };

            // SAFETY: `address` is a valid interface pointer returned by TAPI.
            match unsafe { address.AddressName() } {
                Ok(name) => lines.push(TapiLine {
                    name: name.to_string(),
                    address,
                }),
                Err(e) => warn!("skipping TAPI address without a name: {e}"),
            }
        }
        Ok(lines)
    }
}

impl Drop for TapiProvider {
    fn drop(&mut self) {
        if let Some(tapi) = self.tapi.take() {
            // SAFETY: balances the successful ITTAPI::Initialize.
            if let Err(e) = unsafe { tapi.Shutdown() } {
                warn!("ITTAPI::Shutdown failed: {e}");
            }
        }
    }
}

// ── Line and call ─────────────────────────────────────────────────────────────

/// A TAPI address.
pub struct TapiLine {
    name: String,
    address: ITAddress,
}

impl TelephonyLine for TapiLine {
    type Call = TapiCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn create_call(
        &self,
        destination: &str,
        address_type: AddressType,
        media: MediaType,
    ) -> Result<TapiCall, TelephonyError> {
        let address_type = match address_type {
            AddressType::PhoneNumber => LINEADDRESSTYPE_PHONENUMBER,
        };
        let media = match media {
            MediaType::Audio => TAPIMEDIATYPE_AUDIO,
        };

        // SAFETY: `address` is a valid interface pointer; the BSTR outlives the call.
        let control = unsafe {
            self.address
                .CreateCall(&BSTR::from(destination), address_type, media)
        }
        .map_err(|e| platform_error("ITAddress::CreateCall failed", e))?;
        Ok(TapiCall { control })
    }
}

/// A TAPI call ready to connect.
pub struct TapiCall {
    control: ITBasicCallControl,
}

impl TelephonyCall for TapiCall {
    fn connect(&mut self) -> Result<(), TelephonyError> {
        // Asynchronous connect: returns once TAPI has accepted the request.
        // SAFETY: `control` is a valid interface pointer returned by CreateCall.
        unsafe { self.control.Connect(VARIANT_FALSE) }
            .map_err(|e| TelephonyError::Connect(e.to_string()))
    }
}
