/*!
# Debugging

bfsim can show the machine after every instruction. Comments don't
count as instructions and never stop the program.

```text
$ bfsim --step '+[>+<-]'
================================================================================
Instruction : +
Stack : []
Memory:
0x01
```

Each stop shows the instruction that just ran, the positions of the
open loops, and the tape with the current cell in green. Press ENTER
to run the next instruction.

`--delay` stops for a number of seconds instead of waiting for ENTER.
Use both together to wait for ENTER and then sleep.

```text
$ bfsim --delay 0.2 --file hello.b
```

The tape is drawn with as many cells per row as fit your terminal,
up to 16. Use `--columns` to choose.

## Breakpoints
Put `^` anywhere in a program to stop there even without `--step`
or `--delay`. A breakpoint also shows what the program has printed
so far.

```text
$ bfsim '++++++++[>++++++++<-]>+.^'
================================================================================
Instruction : ^
Stack : []
Memory:
0x00 0x41
A
Press Enter to Continue!
```

## Logging
Set `RUST_LOG=bfsim=debug` to see when a run halts or faults and
`RUST_LOG=bfsim=trace` to see skipped loops and every pause.

*/
