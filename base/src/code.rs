use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Expands one listing into the [`ResultCode`] enum and its lookups.
///
/// Each row is `Variant = value, "NATIVE_NAME", message;` where `message` is
/// `None` for the success code. Rows follow the order of `FMOD_RESULT` in
/// `fmod.h`, with messages from `fmod_errors.h`, so the listing can be
/// regenerated from the native headers when the library is upgraded.
macro_rules! result_codes {
    ($($variant:ident = $value:literal, $name:literal, $message:expr;)*) => {
        /// A native `FMOD_RESULT` value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum ResultCode {
            $($variant = $value,)*
        }

        impl ResultCode {
            /// Every code, in numeric order.
            pub const ALL: &'static [ResultCode] = &[$(ResultCode::$variant,)*];

            /// Symbol used for this code in the native header.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ResultCode::$variant => $name,)*
                }
            }

            /// Diagnostic text, `None` for [`ResultCode::Ok`].
            pub const fn message(self) -> Option<&'static str> {
                match self {
                    $(ResultCode::$variant => $message,)*
                }
            }

            pub const fn from_canonical(key: u64) -> Option<ResultCode> {
                match key {
                    $($value => Some(ResultCode::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

result_codes! {
    Ok = 0, "FMOD_OK", None;
    Alreadylocked = 1, "FMOD_ERR_ALREADYLOCKED", Some("Tried to call lock a second time before unlock was called.");
    Badcommand = 2, "FMOD_ERR_BADCOMMAND", Some("Tried to call a function on a data type that does not allow this type of functionality (ie calling Sound::lock on a streaming sound).");
    CddaDrivers = 3, "FMOD_ERR_CDDA_DRIVERS", Some("Neither NTSCSI nor ASPI could be initialised.");
    CddaInit = 4, "FMOD_ERR_CDDA_INIT", Some("An error occurred while initialising the CDDA subsystem.");
    CddaInvalidDevice = 5, "FMOD_ERR_CDDA_INVALID_DEVICE", Some("Couldn't find the specified device.");
    CddaNoaudio = 6, "FMOD_ERR_CDDA_NOAUDIO", Some("No audio tracks on the specified disc.");
    CddaNodevices = 7, "FMOD_ERR_CDDA_NODEVICES", Some("No CD/DVD devices were found. ");
    CddaNodisc = 8, "FMOD_ERR_CDDA_NODISC", Some("No disc present in the specified drive.");
    CddaRead = 9, "FMOD_ERR_CDDA_READ", Some("A CDDA read error occurred.");
    ChannelAlloc = 10, "FMOD_ERR_CHANNEL_ALLOC", Some("Error trying to allocate a channel.");
    ChannelStolen = 11, "FMOD_ERR_CHANNEL_STOLEN", Some("The specified channel has been reused to play another sound.");
    Com = 12, "FMOD_ERR_COM", Some("A Win32 COM related error occured. COM failed to initialize or a QueryInterface failed meaning a Windows codec or driver was not installed properly.");
    Dma = 13, "FMOD_ERR_DMA", Some("DMA Failure.  See debug output for more information.");
    DspConnection = 14, "FMOD_ERR_DSP_CONNECTION", Some("DSP connection error.  Connection possibly caused a cyclic dependancy.  Or tried to connect a tree too many units deep (more than 128).");
    DspFormat = 15, "FMOD_ERR_DSP_FORMAT", Some("DSP Format error.  A DSP unit may have attempted to connect to this network with the wrong format.");
    DspNotfound = 16, "FMOD_ERR_DSP_NOTFOUND", Some("DSP connection error.  Couldn't find the DSP unit specified.");
    DspRunning = 17, "FMOD_ERR_DSP_RUNNING", Some("DSP error.  Cannot perform this operation while the network is in the middle of running.  This will most likely happen if a connection or disconnection is attempted in a DSP callback.");
    DspToomanyconnections = 18, "FMOD_ERR_DSP_TOOMANYCONNECTIONS", Some("DSP connection error.  The unit being connected to or disconnected should only have 1 input or output.");
    FileBad = 19, "FMOD_ERR_FILE_BAD", Some("Error loading file.");
    FileCouldnotseek = 20, "FMOD_ERR_FILE_COULDNOTSEEK", Some("Couldn't perform seek operation.  This is a limitation of the medium (ie netstreams) or the file format.");
    FileDiskejected = 21, "FMOD_ERR_FILE_DISKEJECTED", Some("Media was ejected while reading.");
    FileEof = 22, "FMOD_ERR_FILE_EOF", Some("End of file unexpectedly reached while trying to read essential data (truncated data?).");
    FileNotfound = 23, "FMOD_ERR_FILE_NOTFOUND", Some("File not found.");
    FileUnwanted = 24, "FMOD_ERR_FILE_UNWANTED", Some("Unwanted file access occured.");
    Format = 25, "FMOD_ERR_FORMAT", Some("Unsupported file or audio format.");
    Http = 26, "FMOD_ERR_HTTP", Some("A HTTP error occurred. This is a catch-all for HTTP errors not listed elsewhere.");
    HttpAccess = 27, "FMOD_ERR_HTTP_ACCESS", Some("The specified resource requires authentication or is forbidden.");
    HttpProxyAuth = 28, "FMOD_ERR_HTTP_PROXY_AUTH", Some("Proxy authentication is required to access the specified resource.");
    HttpServerError = 29, "FMOD_ERR_HTTP_SERVER_ERROR", Some("A HTTP server error occurred.");
    HttpTimeout = 30, "FMOD_ERR_HTTP_TIMEOUT", Some("The HTTP request timed out.");
    Initialization = 31, "FMOD_ERR_INITIALIZATION", Some("FMOD was not initialized correctly to support this function.");
    Initialized = 32, "FMOD_ERR_INITIALIZED", Some("Cannot call this command after System::init.");
    Internal = 33, "FMOD_ERR_INTERNAL", Some("An error occured that wasn't supposed to.  Contact support.");
    InvalidAddress = 34, "FMOD_ERR_INVALID_ADDRESS", Some("On Xbox 360, this memory address passed to FMOD must be physical, (ie allocated with XPhysicalAlloc.)");
    InvalidFloat = 35, "FMOD_ERR_INVALID_FLOAT", Some("Value passed in was a NaN, Inf or denormalized float.");
    InvalidHandle = 36, "FMOD_ERR_INVALID_HANDLE", Some("An invalid object handle was used.");
    InvalidParam = 37, "FMOD_ERR_INVALID_PARAM", Some("An invalid parameter was passed to this function.");
    InvalidPosition = 38, "FMOD_ERR_INVALID_POSITION", Some("An invalid seek position was passed to this function.");
    InvalidSpeaker = 39, "FMOD_ERR_INVALID_SPEAKER", Some("An invalid speaker was passed to this function based on the current speaker mode.");
    InvalidSyncpoint = 40, "FMOD_ERR_INVALID_SYNCPOINT", Some("The syncpoint did not come from this sound handle.");
    InvalidVector = 41, "FMOD_ERR_INVALID_VECTOR", Some("The vectors passed in are not unit length, or perpendicular.");
    Maxaudible = 42, "FMOD_ERR_MAXAUDIBLE", Some("Reached maximum audible playback count for this sound's soundgroup.");
    Memory = 43, "FMOD_ERR_MEMORY", Some("Not enough memory or resources.");
    MemoryCantpoint = 44, "FMOD_ERR_MEMORY_CANTPOINT", Some("Can't use FMOD_OPENMEMORY_POINT on non PCM source data, or non mp3/xma/adpcm data if FMOD_CREATECOMPRESSEDSAMPLE was used.");
    MemorySram = 45, "FMOD_ERR_MEMORY_SRAM", Some("Not enough memory or resources on console sound ram.");
    Needs2d = 46, "FMOD_ERR_NEEDS2D", Some("Tried to call a command on a 3d sound when the command was meant for 2d sound.");
    Needs3d = 47, "FMOD_ERR_NEEDS3D", Some("Tried to call a command on a 2d sound when the command was meant for 3d sound.");
    Needshardware = 48, "FMOD_ERR_NEEDSHARDWARE", Some("Tried to use a feature that requires hardware support.  (ie trying to play a GCADPCM compressed sound in software on Wii).");
    Needssoftware = 49, "FMOD_ERR_NEEDSSOFTWARE", Some("Tried to use a feature that requires the software engine.  Software engine has either been turned off, or command was executed on a hardware channel which does not support this feature.");
    NetConnect = 50, "FMOD_ERR_NET_CONNECT", Some("Couldn't connect to the specified host.");
    NetSocketError = 51, "FMOD_ERR_NET_SOCKET_ERROR", Some("A socket error occurred.  This is a catch-all for socket-related errors not listed elsewhere.");
    NetUrl = 52, "FMOD_ERR_NET_URL", Some("The specified URL couldn't be resolved.");
    NetWouldBlock = 53, "FMOD_ERR_NET_WOULD_BLOCK", Some("Operation on a non-blocking socket could not complete immediately.");
    Notready = 54, "FMOD_ERR_NOTREADY", Some("Operation could not be performed because specified sound/DSP connection is not ready.");
    OutputAllocated = 55, "FMOD_ERR_OUTPUT_ALLOCATED", Some("Error initializing output device, but more specifically, the output device is already in use and cannot be reused.");
    OutputCreatebuffer = 56, "FMOD_ERR_OUTPUT_CREATEBUFFER", Some("Error creating hardware sound buffer.");
    OutputDrivercall = 57, "FMOD_ERR_OUTPUT_DRIVERCALL", Some("A call to a standard soundcard driver failed, which could possibly mean a bug in the driver or resources were missing or exhausted.");
    OutputEnumeration = 58, "FMOD_ERR_OUTPUT_ENUMERATION", Some("Error enumerating the available driver list. List may be inconsistent due to a recent device addition or removal.");
    OutputFormat = 59, "FMOD_ERR_OUTPUT_FORMAT", Some("Soundcard does not support the minimum features needed for this soundsystem (16bit stereo output).");
    OutputInit = 60, "FMOD_ERR_OUTPUT_INIT", Some("Error initializing output device.");
    OutputNohardware = 61, "FMOD_ERR_OUTPUT_NOHARDWARE", Some("FMOD_HARDWARE was specified but the sound card does not have the resources necessary to play it.");
    OutputNosoftware = 62, "FMOD_ERR_OUTPUT_NOSOFTWARE", Some("Attempted to create a software sound but no software channels were specified in System::init.");
    Pan = 63, "FMOD_ERR_PAN", Some("Panning only works with mono or stereo sound sources.");
    Plugin = 64, "FMOD_ERR_PLUGIN", Some("An unspecified error has been returned from a 3rd party plugin.");
    PluginInstances = 65, "FMOD_ERR_PLUGIN_INSTANCES", Some("The number of allowed instances of a plugin has been exceeded.");
    PluginMissing = 66, "FMOD_ERR_PLUGIN_MISSING", Some("A requested output, dsp unit type or codec was not available.");
    PluginResource = 67, "FMOD_ERR_PLUGIN_RESOURCE", Some("A resource that the plugin requires cannot be found. (ie the DLS file for MIDI playback)");
    Preloaded = 68, "FMOD_ERR_PRELOADED", Some("The specified sound is still in use by the event system, call EventSystem::unloadFSB before trying to release it.");
    Programmersound = 69, "FMOD_ERR_PROGRAMMERSOUND", Some("The specified sound is still in use by the event system, wait for the event which is using it finish with it.");
    Record = 70, "FMOD_ERR_RECORD", Some("An error occured trying to initialize the recording device.");
    ReverbInstance = 71, "FMOD_ERR_REVERB_INSTANCE", Some("Specified instance in FMOD_REVERB_PROPERTIES couldn't be set. Most likely because it is an invalid instance number or the reverb doesnt exist.");
    SubsoundAllocated = 72, "FMOD_ERR_SUBSOUND_ALLOCATED", Some("This subsound is already being used by another sound, you cannot have more than one parent to a sound.  Null out the other parent's entry first.");
    SubsoundCantmove = 73, "FMOD_ERR_SUBSOUND_CANTMOVE", Some("Shared subsounds cannot be replaced or moved from their parent stream, such as when the parent stream is an FSB file.");
    SubsoundMode = 74, "FMOD_ERR_SUBSOUND_MODE", Some("The subsound's mode bits do not match with the parent sound's mode bits.  See documentation for function that it was called with.");
    Subsounds = 75, "FMOD_ERR_SUBSOUNDS", Some("The error occured because the sound referenced contains subsounds when it shouldn't have, or it doesn't contain subsounds when it should have.  The operation may also not be able to be performed on a parent sound, or a parent sound was played without setting up a sentence first.");
    Tagnotfound = 76, "FMOD_ERR_TAGNOTFOUND", Some("The specified tag could not be found or there are no tags.");
    Toomanychannels = 77, "FMOD_ERR_TOOMANYCHANNELS", Some("The sound created exceeds the allowable input channel count.  This can be increased using the maxinputchannels parameter in System::setSoftwareFormat.");
    Unimplemented = 78, "FMOD_ERR_UNIMPLEMENTED", Some("Something in FMOD hasn't been implemented when it should be! contact support!");
    Uninitialized = 79, "FMOD_ERR_UNINITIALIZED", Some("This command failed because System::init or System::setDriver was not called.");
    Unsupported = 80, "FMOD_ERR_UNSUPPORTED", Some("A command issued was not supported by this object.  Possibly a plugin without certain callbacks specified.");
    Update = 81, "FMOD_ERR_UPDATE", Some("An error caused by System::update occured.");
    Version = 82, "FMOD_ERR_VERSION", Some("The version number of this file format is not supported.");
    EventFailed = 83, "FMOD_ERR_EVENT_FAILED", Some("An Event failed to be retrieved, most likely due to 'just fail' being specified as the max playbacks behavior.");
    EventInfoonly = 84, "FMOD_ERR_EVENT_INFOONLY", Some("Can't execute this command on an EVENT_INFOONLY event.");
    EventInternal = 85, "FMOD_ERR_EVENT_INTERNAL", Some("An error occured that wasn't supposed to.  See debug log for reason.");
    EventMaxstreams = 86, "FMOD_ERR_EVENT_MAXSTREAMS", Some("Event failed because 'Max streams' was hit when FMOD_EVENT_INIT_FAIL_ON_MAXSTREAMS was specified.");
    EventMismatch = 87, "FMOD_ERR_EVENT_MISMATCH", Some("FSB mismatches the FEV it was compiled with, the stream/sample mode it was meant to be created with was different, or the FEV was built for a different platform.");
    EventNameconflict = 88, "FMOD_ERR_EVENT_NAMECONFLICT", Some("A category with the same name already exists.");
    EventNotfound = 89, "FMOD_ERR_EVENT_NOTFOUND", Some("The requested event, event group, event category or event property could not be found.");
    EventNeedssimple = 90, "FMOD_ERR_EVENT_NEEDSSIMPLE", Some("Tried to call a function on a complex event that's only supported by simple events.");
    EventGuidconflict = 91, "FMOD_ERR_EVENT_GUIDCONFLICT", Some("An event with the same GUID already exists.");
    EventAlreadyLoaded = 92, "FMOD_ERR_EVENT_ALREADY_LOADED", Some("The specified project or bank has already been loaded. Having multiple copies of the same project loaded simultaneously is forbidden.");
    MusicUninitialized = 93, "FMOD_ERR_MUSIC_UNINITIALIZED", Some("Music system is not initialized probably because no music data is loaded.");
    MusicNotfound = 94, "FMOD_ERR_MUSIC_NOTFOUND", Some("The requested music entity could not be found.");
    MusicNocallback = 95, "FMOD_ERR_MUSIC_NOCALLBACK", Some("The music callback is required, but it has not been set.");
}

impl ResultCode {
    pub const fn value(self) -> u32 {
        self as u32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, ResultCode::Ok)
    }

    /// Same text `FMOD_ErrorString` returns.
    pub const fn description(self) -> &'static str {
        match self.message() {
            Some(message) => message,
            None => "No errors.",
        }
    }

    pub fn into_result(self) -> Result<(), Error> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Native(self))
        }
    }
}

impl TryFrom<u64> for ResultCode {
    type Error = Error;

    fn try_from(key: u64) -> Result<Self, Self::Error> {
        ResultCode::from_canonical(key)
            .ok_or(Error::UnknownCode(crate::normalize::RawCode::Unsigned(key)))
    }
}

impl From<ResultCode> for u32 {
    fn from(code: ResultCode) -> Self {
        code.value()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_dense_and_ordered() {
        assert_eq!(ResultCode::ALL.len(), 96);
        for (index, code) in ResultCode::ALL.iter().enumerate() {
            assert_eq!(code.value() as usize, index, "{code}");
        }
    }

    #[test]
    fn only_ok_has_no_message() {
        let silent: Vec<_> = ResultCode::ALL
            .iter()
            .filter(|code| code.message().is_none())
            .collect();
        assert_eq!(silent, vec![&ResultCode::Ok]);
    }

    #[test]
    fn native_names() {
        assert_eq!(ResultCode::Ok.name(), "FMOD_OK");
        assert_eq!(ResultCode::FileNotfound.name(), "FMOD_ERR_FILE_NOTFOUND");
        assert_eq!(ResultCode::MusicNocallback.name(), "FMOD_ERR_MUSIC_NOCALLBACK");
        assert_eq!(
            ResultCode::FileNotfound.to_string(),
            "FMOD_ERR_FILE_NOTFOUND (23)"
        );
    }

    #[test]
    fn description_matches_error_string() {
        assert_eq!(ResultCode::Ok.description(), "No errors.");
        assert_eq!(ResultCode::FileNotfound.description(), "File not found.");
        assert_eq!(
            ResultCode::CddaNodevices.description(),
            "No CD/DVD devices were found. "
        );
    }

    #[test]
    fn from_canonical_rejects_force_int() {
        assert_eq!(ResultCode::from_canonical(23), Some(ResultCode::FileNotfound));
        assert_eq!(ResultCode::from_canonical(95), Some(ResultCode::MusicNocallback));
        assert_eq!(ResultCode::from_canonical(96), None);
        assert_eq!(ResultCode::from_canonical(65536), None);
        assert!(ResultCode::try_from(65536u64).is_err());
    }

    #[test]
    fn into_result() {
        assert_eq!(ResultCode::Ok.into_result(), Ok(()));
        assert_eq!(
            ResultCode::DspConnection.into_result(),
            Err(Error::Native(ResultCode::DspConnection))
        );
    }

    #[test]
    fn serializes_by_variant() {
        let json = serde_json::to_string(&ResultCode::HttpTimeout).unwrap();
        assert_eq!(json, "\"HttpTimeout\"");
        let code: ResultCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, ResultCode::HttpTimeout);
    }
}
