
mod columns;
mod construction;
mod sort;
mod transforms;
