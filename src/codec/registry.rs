use super::{Decoder, Encoder, GetDescriptor, Registry, SetDescriptor};

// /jc status variables
const STATUS_TABLE: &[GetDescriptor] = &[
    GetDescriptor::new("device_time", "devt", Decoder::Timestamp),
    GetDescriptor::new("board_count", "nbrd", Decoder::Integer),
    GetDescriptor::new("enable", "en", Decoder::Flag),
    GetDescriptor::new("rain_delay", "rd", Decoder::Flag),
    GetDescriptor::new("rain_sensor", "rs", Decoder::Flag),
    // Rain delay stop time; exact type unconfirmed, kept as text
    GetDescriptor::new("rain_resume", "rdst", Decoder::Text),
    GetDescriptor::new("location", "loc", Decoder::Text),
    GetDescriptor::new("weather_id", "wtkey", Decoder::Text),
    GetDescriptor::new("sunrise", "sunrise", Decoder::SunTime),
    GetDescriptor::new("sunset", "sunset", Decoder::SunTime),
    GetDescriptor::new("external_ip", "eip", Decoder::IpAddress),
    GetDescriptor::new("last_weather", "lwc", Decoder::Timestamp),
    GetDescriptor::new("last_good_weather", "lswc", Decoder::Timestamp),
    GetDescriptor::new("station_status", "sbits", Decoder::StationBits),
    // ps and lrun layouts are unconfirmed; returned as raw JSON
    GetDescriptor::new("program_status", "ps", Decoder::Passthrough),
    GetDescriptor::new("last_run", "lrun", Decoder::Passthrough),
];

// /cv change-variable commands
const COMMAND_TABLE: &[SetDescriptor] = &[
    SetDescriptor::new("reset_all", "rsn", Encoder::Integer),
    SetDescriptor::new("reboot", "rbt", Encoder::Integer),
    SetDescriptor::new("enable", "en", Encoder::Integer),
    SetDescriptor::new("rain_delay", "rd", Encoder::RainDelay),
    SetDescriptor::new("remote_extension", "re", Encoder::Integer),
];

pub static STATUS_FIELDS: Registry<Decoder> = Registry::new(STATUS_TABLE);
pub static COMMAND_FIELDS: Registry<Encoder> = Registry::new(COMMAND_TABLE);
