pub mod ped;
