mod chunk;
mod complete;
mod embed;
mod extract;
mod strip;
mod utils;
mod verify;
